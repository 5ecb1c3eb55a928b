pub mod db;
mod error;
mod user;
pub mod favorite {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod seller {
    pub mod entity;
    pub mod repository;
}
pub mod shop {
    pub mod entity;
    pub mod repository;
}
