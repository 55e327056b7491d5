//! Sealed memo entries and the container arena.
//!
//! - `entry`: `VaultEntry`, the plaintext record with its self-signature
//! - `container`: `Container`, the on-disk JSON envelope
//! - `seal`: the core passphrase operations `seal` / `open`
//! - `store`: `ContainerStore`, the id-to-file arena

pub mod container;
pub mod entry;
pub mod seal;
pub mod store;

pub use container::{Container, ContainerMetadata};
pub use entry::{VaultEntry, SIGNATURE_FIELD};
pub use seal::{open, open_with_params, seal, seal_with_params};
pub use store::{validate_container_id, ContainerInfo, ContainerStore, CONTAINER_EXT};
