// Pipelines — end-to-end runs over a document collection.

pub mod summary;
