#![no_main]

use cqrsgen::application::DEFAULT_NAMESPACE;
use cqrsgen::{CSharpRenderer, GenError, Generator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // An accepted name must always render to grammatical C#
        let generator = Generator::new(DEFAULT_NAMESPACE, CSharpRenderer::new());
        match generator.generate_entity(raw) {
            Ok(_) | Err(GenError::InvalidEntityName { .. }) => {}
            Err(e) => panic!("{:?} rendering {:?}", e, raw),
        }
    }
});
