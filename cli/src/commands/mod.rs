pub mod action;
pub mod delete;
pub mod list;
pub mod login;
pub mod select;
pub mod selected;
pub mod update;

pub use action::{ActionKind, BuiltinAction, NoopAction, OntAction};
pub use select::Selection;
