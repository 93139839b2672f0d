pub mod member;
pub mod member_fields;
