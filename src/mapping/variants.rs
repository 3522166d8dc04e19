use super::{FieldSource, Variant};

const GLUE_REQUIRED_FIELDS: &[&str] = &[
    "role_arn",
    "region",
    "workers",
    "worker_type",
    "schema",
    "session_provisioning_timeout_in_seconds",
    "location",
];

pub static AWS_GLUE_ROLE_ARN: Variant = Variant {
    name: "aws-glue-role-arn",
    connection_type: "aws",
    profile_type: "glue",
    required_fields: GLUE_REQUIRED_FIELDS,
    field_sources: &[
        ("role_arn", FieldSource::Extra("role_arn")),
        ("region", FieldSource::Extra("region_name")),
    ],
    secret_fields: &[],
};

pub static AWS_GLUE_ACCESS_KEY: Variant = Variant {
    name: "aws-glue-access-key",
    connection_type: "aws",
    profile_type: "glue",
    required_fields: GLUE_REQUIRED_FIELDS,
    field_sources: &[
        ("role_arn", FieldSource::Extra("role_arn")),
        ("region", FieldSource::Extra("region_name")),
        ("access_key_id", FieldSource::Login),
        ("secret_access_key", FieldSource::Password),
    ],
    secret_fields: &["access_key_id", "secret_access_key"],
};

// Registration order is the selection order: role-based auth wins over
// static access keys when a connection satisfies both.
static BUILTIN_VARIANTS: &[&Variant] = &[&AWS_GLUE_ROLE_ARN, &AWS_GLUE_ACCESS_KEY];

pub fn builtin_variants() -> &'static [&'static Variant] {
    BUILTIN_VARIANTS
}
