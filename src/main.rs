use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    autotranslate::cli::main()
}
