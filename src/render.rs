pub(crate) mod canvas;
pub(crate) mod compose;
pub(crate) mod composite;
pub(crate) mod pipeline;
pub(crate) mod select;
