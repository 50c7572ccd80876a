//! The employees stream
//!
//! One projected record per employee from `GET /v1/people`. The allow-list
//! below is the single source of truth for which fields leave the
//! connector: the output schema mirrors it and the server-side field
//! selection is derived from its leaves.
//!
//! The `field_*`, `column_*`, and `category_*` identifiers are
//! tenant-specific custom-field codes with no meaning outside this HiBob
//! account; they are kept as opaque literals, annotated with the display
//! names they map to in the tenant's configuration.

use super::StreamDefinition;
use crate::pagination::PaginationConfig;
use crate::projection::AllowList;
use crate::request::RequestShape;
use crate::schema::{SchemaProperty, StreamSchema};
use crate::types::SyncMode;
use serde_json::json;

/// The employees stream against the plain listing endpoint
pub fn definition() -> StreamDefinition {
    let allow_list = allow_list();
    let field_selection = allow_list.leaf_paths();

    StreamDefinition {
        name: "employees".to_string(),
        path: "/v1/people".to_string(),
        primary_key: vec!["id".to_string()],
        sync_mode: SyncMode::FullRefresh,
        record_path: "$.employees[*]".to_string(),
        request: RequestShape::Query {
            params: vec![
                ("showInactive".to_string(), "true".to_string()),
                ("includeHumanReadable".to_string(), "true".to_string()),
            ],
        },
        pagination: PaginationConfig::None,
        allow_list,
        schema: schema(),
        field_selection,
    }
}

/// The employees stream against the search endpoint.
///
/// Same output contract as [`definition`], but as a POST whose body carries
/// the field-selection list. Kept as configuration for tenants whose API
/// contract requires the search shape.
pub fn search_definition() -> StreamDefinition {
    StreamDefinition {
        path: "/v1/people/search".to_string(),
        request: RequestShape::JsonBody {
            flags: vec![
                ("showInactive".to_string(), json!(true)),
                ("humanReadable".to_string(), json!("append")),
            ],
        },
        ..definition()
    }
}

/// The employees allow-list, one node per nesting level
fn allow_list() -> AllowList {
    AllowList::new()
        .keep_all([
            "id",
            "creationDateTime",
            "firstName",
            "surname",
            "fullName",
            "displayName",
            "companyId",
            "email",
        ])
        .nest(
            "work",
            AllowList::new()
                .keep_all(["startDate", "department", "isManager", "site"])
                .nest("reportsTo", AllowList::new().keep("id"))
                .nest(
                    "custom",
                    // CompanyName
                    AllowList::new().keep("field_1667499206086"),
                ),
        )
        .nest(
            "internal",
            AllowList::new().keep_all(["terminationDate", "lifecycleStatus"]),
        )
        .nest(
            "address",
            AllowList::new().keep_all(["siteCountry", "usaState", "city", "siteCity", "country"]),
        )
        .nest(
            "payroll",
            AllowList::new().nest("employment", AllowList::new().keep("contract")),
        )
        .nest(
            "humanReadable",
            AllowList::new()
                .nest(
                    "work",
                    AllowList::new()
                        .keep_all(["reportsTo", "department", "title"])
                        .nest(
                            "custom",
                            AllowList::new()
                                // CompanyName
                                .keep("field_1667499206086")
                                // AssociateID
                                .keep("field_1667499039796"),
                        )
                        .nest(
                            "customColumns",
                            // Subdepartment
                            AllowList::new().keep("column_1667499229415"),
                        ),
                )
                .nest(
                    "custom",
                    AllowList::new()
                        .nest(
                            "category_1726078147147",
                            // DD_JobFamilyLevel
                            AllowList::new().keep("field_1730210998067"),
                        )
                        .nest(
                            "category_1673451690985",
                            AllowList::new()
                                // DevelopPermissionRole
                                .keep("field_1704464569961")
                                // DevelopDisableLogin
                                .keep("field_1704464284132")
                                // DevelopDelete
                                .keep("field_1704464333828"),
                        ),
                ),
        )
}

/// The employees output schema, mirroring the allow-list shape
fn schema() -> StreamSchema {
    StreamSchema::object([
        ("id", SchemaProperty::string()),
        ("creationDateTime", SchemaProperty::date_time()),
        ("firstName", SchemaProperty::string()),
        ("surname", SchemaProperty::string()),
        ("fullName", SchemaProperty::string()),
        ("displayName", SchemaProperty::string()),
        ("companyId", SchemaProperty::integer()),
        ("email", SchemaProperty::string()),
        (
            "work",
            SchemaProperty::object([
                ("startDate", SchemaProperty::string()),
                ("department", SchemaProperty::string()),
                ("isManager", SchemaProperty::boolean()),
                ("site", SchemaProperty::string()),
                (
                    "reportsTo",
                    SchemaProperty::object([("id", SchemaProperty::string())]),
                ),
                (
                    "custom",
                    SchemaProperty::object([(
                        "field_1667499206086",
                        SchemaProperty::string().describe("CompanyName"),
                    )]),
                ),
            ]),
        ),
        (
            "internal",
            SchemaProperty::object([
                ("terminationDate", SchemaProperty::string()),
                ("lifecycleStatus", SchemaProperty::string()),
            ]),
        ),
        (
            "address",
            SchemaProperty::object([
                ("siteCountry", SchemaProperty::string()),
                ("usaState", SchemaProperty::string()),
                ("city", SchemaProperty::string()),
                ("siteCity", SchemaProperty::string()),
                ("country", SchemaProperty::string()),
            ]),
        ),
        (
            "payroll",
            SchemaProperty::object([(
                "employment",
                SchemaProperty::object([("contract", SchemaProperty::string())]),
            )]),
        ),
        (
            "humanReadable",
            SchemaProperty::object([
                (
                    "work",
                    SchemaProperty::object([
                        ("reportsTo", SchemaProperty::string()),
                        ("department", SchemaProperty::string()),
                        ("title", SchemaProperty::string()),
                        (
                            "custom",
                            SchemaProperty::object([
                                (
                                    "field_1667499206086",
                                    SchemaProperty::string().describe("CompanyName"),
                                ),
                                (
                                    "field_1667499039796",
                                    SchemaProperty::string().describe("AssociateID"),
                                ),
                            ]),
                        ),
                        (
                            "customColumns",
                            SchemaProperty::object([(
                                "column_1667499229415",
                                SchemaProperty::string().describe("Subdepartment"),
                            )]),
                        ),
                    ]),
                ),
                (
                    "custom",
                    SchemaProperty::object([
                        (
                            "category_1726078147147",
                            SchemaProperty::object([(
                                "field_1730210998067",
                                SchemaProperty::string().describe("DD_JobFamilyLevel"),
                            )]),
                        ),
                        (
                            "category_1673451690985",
                            SchemaProperty::object([
                                (
                                    "field_1704464569961",
                                    SchemaProperty::string().describe("DevelopPermissionRole"),
                                ),
                                (
                                    "field_1704464284132",
                                    SchemaProperty::string().describe("DevelopDisableLogin"),
                                ),
                                (
                                    "field_1704464333828",
                                    SchemaProperty::string().describe("DevelopDelete"),
                                ),
                            ]),
                        ),
                    ]),
                ),
            ]),
        ),
    ])
}
