// @generated
// Wires the buf-generated message and service code into modules matching the
// protobuf packages.

pub mod todo {
    pub mod v1 {
        include!("todo.v1.rs");
        include!("todo.v1.tonic.rs");
    }
}

pub mod auth {
    pub mod v1 {
        include!("auth.v1.rs");
        include!("auth.v1.tonic.rs");
    }
}
