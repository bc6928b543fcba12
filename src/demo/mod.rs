pub(crate) mod gallery;
