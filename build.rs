use std::error::Error;
use vergen::{BuildBuilder, Emitter};

fn main() -> Result<(), Box<dyn Error>> {
    // Target platform revision the generated Jack code is written against
    println!("cargo:rustc-env=HACK_PLATFORM_VERSION=2.5");

    let build = BuildBuilder::default().build_timestamp(true).build()?;

    Emitter::default().add_instructions(&build)?.emit()?;

    Ok(())
}
