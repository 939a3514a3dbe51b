pub mod file;
pub mod keys;
pub mod memory;
pub mod storage;
pub mod catalog {
    pub mod entity;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod wishlist {
    pub mod repository;
}
