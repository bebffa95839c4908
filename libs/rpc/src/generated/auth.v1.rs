// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct VerifyTokenRequest {
    #[prost(string, tag="1")]
    pub token: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct VerifyTokenResponse {
    #[prost(string, tag="1")]
    pub user_id: ::prost::alloc::string::String,
}
// @@protoc_insertion_point(module)
