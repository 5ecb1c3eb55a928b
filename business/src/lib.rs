pub mod application {
    pub mod favorite {
        pub mod add;
        pub mod get_all;
        pub mod remove;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_category;
        pub mod get_by_id;
        mod ownership;
        pub mod update;
    }
    pub mod seller {
        pub mod register;
    }
    pub mod shop {
        pub mod code_generator;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod pagination;
        pub mod value_objects;
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_all;
            pub mod remove;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod seller {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod register;
        }
    }
    pub mod shop {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
