//! Component Gallery Example
//!
//! Builds an avatar group and a grid list, then prints the rendered
//! markup.

use std::fs::File;

use millwork::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use webdom::render_html_pretty;

fn avatars() -> Element {
    AvatarGroup::new()
        .dense(true)
        .child(
            Avatar::new()
                .name("Jane Doe")
                .size(AvatarSize::Large)
                .interactive(true)
                .build(),
        )
        .child(
            Avatar::new()
                .name("Grace Hopper")
                .src("https://example.com/grace.png")
                .size(AvatarSize::Large)
                .build(),
        )
        .child(AvatarCount::new(12).overflow(true).size(AvatarSize::Large).build())
        .build()
}

fn tiles() -> Element {
    let tile = |title: &str, support: &str, image: &str| {
        GridTile::new()
            .child(
                GridTilePrimary::new()
                    .child(GridTilePrimaryContent::new().src(image).build())
                    .build(),
            )
            .child(
                GridTileSecondary::new()
                    .child(GridTileIcon::new(Icon::name("star")).build())
                    .child(GridTileTitle::new(title).build())
                    .child(GridTileTitleSupportText::new(support).build())
                    .build(),
            )
            .build()
    };

    GridList::new()
        .tile_aspect(TileAspect::SixteenByNine)
        .twoline_caption(true)
        .children(vec![
            tile("Sunrise", "Monday 6:02", "sunrise.png"),
            tile("Harbor", "Tuesday 18:40", "harbor.png"),
            tile("Forest", "Friday 12:11", "forest.png"),
        ])
        .build()
}

fn main() {
    let log_file = File::create("gallery.log").expect("failed to create log file");
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    println!("{}", render_html_pretty(&avatars()));
    println!("{}", render_html_pretty(&tiles()));
}
