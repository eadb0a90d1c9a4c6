use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/");

    // The header only describes the C API.
    if env::var_os("CARGO_FEATURE_C_API").is_none() {
        return;
    }

    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let include_dir = PathBuf::from(&crate_dir).join("include");
    let header_path = include_dir.join("longvec_core.h");

    std::fs::create_dir_all(&include_dir).unwrap();

    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_include_guard("LONGVEC_CORE_H")
        .with_header("// GENERATED FILE -- DO NOT EDIT")
        .with_language(cbindgen::Language::C)
        .with_cpp_compat(true)
        .with_sys_include("stddef.h")
        .with_sys_include("stdint.h")
        .with_sys_include("stdbool.h")
        .generate()
        .expect("Unable to generate bindings");

    // Returns false when the header on disk is already up to date.
    let _written = bindings.write_to_file(&header_path);

    // Emit the include directory for other crates
    println!("cargo:include={}", include_dir.display());
}
