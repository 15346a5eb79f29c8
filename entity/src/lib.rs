pub mod document;
pub mod user;

/*
 Every document belongs to exactly one user; a user owns zero or more
 documents (this was a strict one-to-one in an early revision). Deleting
 a user takes every owned document with it.
 Ownership is the whole access-control model: a document is only ever
 reachable through its owner's id.
 */
