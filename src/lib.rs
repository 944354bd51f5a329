pub mod shared {
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod emergency_events {
        pub mod core {
            pub mod model;
        }
        pub mod use_cases {
            pub mod submit_event {
                pub mod command;
                pub mod handler;
                pub mod validate;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
