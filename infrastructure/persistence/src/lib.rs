pub mod db;
pub mod error;
pub mod catalog {
    pub mod listener;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod price_history {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
