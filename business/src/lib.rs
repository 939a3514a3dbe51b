pub mod application {
    pub mod cart;
    pub mod store;
    pub mod wishlist;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod catalog {
        pub mod model;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod actions;
        pub mod model;
        pub mod repository;
    }
    pub mod wishlist {
        pub mod actions;
        pub mod model;
        pub mod repository;
    }
}
