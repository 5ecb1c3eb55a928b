pub mod error;
pub mod pagination;
pub mod security;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod favorite {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod seller {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod shop {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
