//! OpenAPI document of the API, served under `/api-docs`.
//!
//! Login, logout, registration and lineup creation are described on their
//! handlers. The shared CRUD handlers are generic, so their operations are
//! added here per record kind by [`RecordRoutes`].

use lineup_models::{
    lineup::{LineUp, LineUpCreate, LineUpPatch},
    side::{Side, SideCreate, SidePatch},
    site::{Site, SiteCreate, SitePatch},
    store::Record,
    user::{User, UserPatch},
};
use utoipa::{
    Modify, OpenApi, ToSchema,
    openapi::{
        ContentBuilder, Paths, Ref, RefOr, Required, ResponseBuilder,
        path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn},
        request_body::RequestBodyBuilder,
        schema::{ArrayBuilder, KnownFormat, ObjectBuilder, Schema, SchemaFormat, Type},
        security::{HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme},
    },
};

use crate::{
    auth::{LoginRequest, LoginResponse},
    error::MessageBody,
    user::UserPost,
};

/// Name of the security scheme gated operations refer to.
pub const BEARER_SCHEME: &str = "bearerAuth";

const JSON: &str = "application/json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LineUps API",
        description = "Store and share lineups: where to stand and aim to land a throw."
    ),
    paths(
        crate::auth::login,
        crate::auth::logout,
        crate::user::register,
        crate::lineup::create_lineup,
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        MessageBody,
        UserPost,
        User,
        UserPatch,
        LineUp,
        LineUpCreate,
        LineUpPatch,
        Side,
        SideCreate,
        SidePatch,
        Site,
        SiteCreate,
        SitePatch,
    )),
    modifiers(&BearerScheme, &RecordRoutes),
    tags(
        (name = "auth", description = "Login and logout"),
        (name = "user", description = "User accounts"),
        (name = "lineup", description = "Lineups"),
        (name = "side", description = "Sides"),
        (name = "site", description = "Sites"),
    )
)]
pub struct ApiDoc;

struct BearerScheme;

impl Modify for BearerScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                BEARER_SCHEME,
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Which operations of a record's routes need a token.
#[derive(Debug, Clone, Copy)]
struct Gate {
    read: bool,
    write: bool,
}

const PUBLIC: Gate = Gate {
    read: false,
    write: false,
};

struct RecordRoutes;

impl Modify for RecordRoutes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let paths = &mut openapi.paths;
        // `POST /user` and `POST /lineup` have their own handlers.
        record_paths::<User>(paths, "user", Gate { read: true, write: true }, false);
        record_paths::<LineUp>(paths, "lineup", Gate { read: false, write: true }, false);
        record_paths::<Side>(paths, "side", PUBLIC, true);
        record_paths::<Site>(paths, "site", PUBLIC, true);
    }
}

fn schema_ref(name: impl Into<String>) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn json_response(description: &str, schema: RefOr<Schema>) -> utoipa::openapi::Response {
    ResponseBuilder::new()
        .description(description)
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

fn operation(tag: &str, id: String, summary: String, gated: bool) -> OperationBuilder {
    let builder = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(id))
        .summary(Some(summary));
    if gated {
        builder
            .security(SecurityRequirement::new(BEARER_SCHEME, Vec::<String>::new()))
            .response(
                "401",
                json_response("Missing or invalid token", schema_ref(MessageBody::name())),
            )
    } else {
        builder
    }
}

fn with_id(builder: OperationBuilder) -> OperationBuilder {
    builder
        .parameter(
            ParameterBuilder::new()
                .name("id")
                .parameter_in(ParameterIn::Path)
                .required(Required::True)
                .schema(Some(
                    ObjectBuilder::new()
                        .schema_type(Type::String)
                        .format(Some(SchemaFormat::KnownFormat(KnownFormat::Uuid))),
                ))
                .build(),
        )
        .response(
            "404",
            json_response("No record with this id", schema_ref(MessageBody::name())),
        )
}

fn with_body(builder: OperationBuilder, schema: RefOr<Schema>) -> OperationBuilder {
    builder
        .request_body(Some(
            RequestBodyBuilder::new()
                .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
                .required(Some(Required::True))
                .build(),
        ))
        .response(
            "400",
            json_response("Malformed or invalid body", schema_ref(MessageBody::name())),
        )
}

/// Adds the list, read, update and delete operations of `T` under `/{tag}`,
/// plus create when `with_create` is set.
fn record_paths<T>(paths: &mut Paths, tag: &str, gate: Gate, with_create: bool)
where
    T: Record + ToSchema,
    T::Create: ToSchema,
    T::Patch: ToSchema,
{
    let collection = format!("/{tag}");
    let single = format!("/{tag}/{{id}}");
    let record = || schema_ref(T::name());

    let list = operation(tag, format!("list_{tag}"), format!("List every {tag}"), gate.read)
        .response(
            "200",
            json_response(
                "All records",
                RefOr::T(Schema::Array(ArrayBuilder::new().items(record()).build())),
            ),
        );
    paths.add_path_operation(&collection, vec![HttpMethod::Get], list.build());

    if with_create {
        let create = operation(tag, format!("create_{tag}"), format!("Create a {tag}"), gate.write)
            .response("201", json_response("Created", record()));
        let create = with_body(create, schema_ref(<T::Create as ToSchema>::name()));
        paths.add_path_operation(&collection, vec![HttpMethod::Post], create.build());
    }

    let fetch = operation(tag, format!("get_{tag}"), format!("Read one {tag}"), gate.read)
        .response("200", json_response("The record", record()));
    paths.add_path_operation(&single, vec![HttpMethod::Get], with_id(fetch).build());

    let update = operation(tag, format!("update_{tag}"), format!("Update a {tag}"), gate.write)
        .response("200", json_response("The updated record", record()));
    let update = with_body(with_id(update), schema_ref(<T::Patch as ToSchema>::name()));
    paths.add_path_operation(&single, vec![HttpMethod::Put], update.build());

    let delete = operation(tag, format!("delete_{tag}"), format!("Delete a {tag}"), gate.write)
        .response("204", ResponseBuilder::new().description("Deleted").build());
    paths.add_path_operation(&single, vec![HttpMethod::Delete], with_id(delete).build());
}
