use vergen::{CargoBuilder, Emitter, RustcBuilder};
use vergen_git2::Git2Builder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cargo = CargoBuilder::all_cargo()?;
    let rustc = RustcBuilder::all_rustc()?;

    // crates.io tarballs have no git metadata; fall back to placeholders there.
    let git2_result = Git2Builder::default().sha(true).describe(true, true, None).build();

    match git2_result {
        Ok(git2) => {
            Emitter::default()
                .add_instructions(&cargo)?
                .add_instructions(&rustc)?
                .add_instructions(&git2)?
                .emit()?;
        }
        Err(_) => {
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
            println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown");

            Emitter::default()
                .add_instructions(&cargo)?
                .add_instructions(&rustc)?
                .emit()?;
        }
    }

    Ok(())
}
