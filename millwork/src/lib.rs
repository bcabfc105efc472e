//! Presentational components that wrap a CSS design system's markup and
//! class-naming conventions in declarative builder form.
//!
//! Each component is a builder mapping typed props to a fixed set of class
//! tokens and a fixed [`webdom::Element`] tree. Interactive behavior (sort
//! cycling, clicks) is delegated to callback props; the components
//! themselves hold no state between builds.

pub mod avatar;
pub mod data_table;
pub mod event;
pub mod factory;
pub mod grid_list;
pub mod icon;
pub mod utils;

pub mod prelude {
    pub use crate::avatar::{Avatar, AvatarCount, AvatarGroup, AvatarSize};
    pub use crate::data_table::{
        CellAlign, DataTable, DataTableBody, DataTableCell, DataTableContent, DataTableHead,
        DataTableHeadCell, DataTableRow, Sort,
    };
    pub use crate::data_table::{CellProps, RowProps, SimpleDataTable};
    pub use crate::event::{ClickEvent, Modifiers, MouseButton};
    pub use crate::factory::{ComponentSpec, FactoryError, Passthrough, Tag};
    pub use crate::grid_list::{
        GridList, GridTile, GridTileIcon, GridTilePrimary, GridTilePrimaryContent,
        GridTileSecondary, GridTileTitle, GridTileTitleSupportText, TileAspect,
    };
    pub use crate::icon::Icon;

    pub use webdom::{ClassList, Content, Element};
}
