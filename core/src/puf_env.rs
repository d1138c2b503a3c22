/*++

Licensed under the Apache-2.0 license.

File Name:

    puf_env.rs

Abstract:

    File implements a context holding all the services utilized by the
    PUF boot flow. The primary need for this abstraction is to hide the
    platform details from the flow code. The natural side benefit is that
    it makes authoring mocks and unit tests easy.

--*/

use crate::state::PufState;
use puf_hashes::Sha1;
use puf_storage::NvStorage;

/// PUF Context
pub struct PufEnv<'a> {
    /// SHA-1 Engine
    pub sha1: Sha1,

    /// Non-volatile storage holding the helper data blob
    pub storage: &'a mut dyn NvStorage,

    /// Reset-surviving PUF state
    pub state: &'a mut PufState,
}

impl<'a> PufEnv<'a> {
    /// Assemble the context for one boot sequence
    ///
    /// # Arguments
    ///
    /// * `storage` - Non-volatile storage driver
    /// * `state` - Reset-surviving PUF state
    pub fn new(storage: &'a mut dyn NvStorage, state: &'a mut PufState) -> Self {
        Self {
            sha1: Sha1::default(),
            storage,
            state,
        }
    }
}
