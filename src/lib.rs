pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod postgres;
    }
}

pub mod modules {
    pub mod hotels {
        pub mod core {
            pub mod hotel;
        }
        pub mod ports;
        pub mod use_cases {
            pub mod errors;
            pub mod check_hotel_access {
                pub mod handler;
            }
            pub mod list_hotels {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_hotel_with_rooms {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod errors;
            }
            pub mod outbound {
                pub mod hotels_in_memory;
                pub mod hotels_postgres;
            }
        }
    }
    pub mod ticketing {
        pub mod core {
            pub mod enrollment;
            pub mod ticket;
        }
        pub mod ports;
        pub mod adapters {
            pub mod outbound {
                pub mod ticketing_in_memory;
                pub mod ticketing_postgres;
            }
        }
    }
    pub mod sessions {
        pub mod core {
            pub mod session;
        }
        pub mod ports;
        pub mod adapters {
            pub mod outbound {
                pub mod sessions_in_memory;
                pub mod sessions_postgres;
            }
        }
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
