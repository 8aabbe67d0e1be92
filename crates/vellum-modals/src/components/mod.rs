pub(crate) mod icons;
pub(crate) mod modal;
pub(crate) mod parts;
pub(crate) mod provider;
