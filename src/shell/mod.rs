// Composition root.
//
// - Read config from environment.
// - Pick Postgres or in memory adapters and wire them into the use case handlers.
// - Expose the HTTP router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
