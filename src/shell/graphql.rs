use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::hotels::use_cases::get_hotel_with_rooms::inbound::graphql::GetHotelWithRoomsQuery;
use crate::modules::hotels::use_cases::list_hotels::inbound::graphql::ListHotelsQuery;
use crate::modules::sessions::core::session::AuthenticatedUser;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListHotelsQuery, GetHotelWithRoomsQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}

/// Runs behind the authentication layer; the session user is handed to the resolvers.
pub async fn handle(
    Extension(schema): Extension<AppSchema>,
    Extension(user): Extension<AuthenticatedUser>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner().data(user)).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
