pub mod model;
pub mod updates;
pub mod view;
