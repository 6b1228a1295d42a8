//! Declarative host surface: serializable props and drawer-driven progress.

pub(crate) mod props;
pub(crate) mod toggle;
