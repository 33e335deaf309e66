pub mod application {
    pub mod catalog {
        pub mod seed;
        pub mod sync;
    }
    pub mod export {
        pub mod build;
    }
    pub mod order {
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod save;
        pub mod update;
    }
    pub mod price_history {
        pub mod get_all;
    }
    pub mod product {
        pub mod commit_price;
        pub mod create;
        pub mod delete;
        pub mod import;
    }
    pub mod review {
        pub mod complete;
        pub mod request;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod change;
        pub mod errors;
        pub mod use_cases {
            pub mod seed;
        }
    }
    pub mod export {
        pub mod builder;
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod build;
        }
    }
    pub mod order {
        pub mod draft;
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod receipt;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod save;
            pub mod update;
        }
    }
    pub mod price_history {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod import;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod commit_price;
            pub mod create;
            pub mod delete;
            pub mod import;
        }
    }
    pub mod review {
        pub mod errors;
        pub mod use_cases {
            pub mod complete;
            pub mod request;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}

#[cfg(test)]
pub mod test_utils;
