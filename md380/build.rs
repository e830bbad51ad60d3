fn main() {
    println!("cargo:rerun-if-env-changed=MD380_VOCODER_LIB_DIR");

    // Only the native binding links against libmd380_vocoder.
    if std::env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }

    if let Some(dir) = std::env::var_os("MD380_VOCODER_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }
    println!("cargo:rustc-link-lib=md380_vocoder");

    // The vocoder is C++ and emulates the firmware on dynarmic.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    match target_os.as_str() {
        "macos" => {
            println!("cargo:rustc-link-lib=c++");
            println!("cargo:rustc-link-lib=framework=CoreFoundation");
        }
        "linux" => {
            println!("cargo:rustc-link-lib=stdc++");
            println!("cargo:rustc-link-lib=dl");
            println!("cargo:rustc-link-lib=pthread");
        }
        _ => println!("cargo:rustc-link-lib=stdc++"),
    }
    println!("cargo:rustc-link-lib=m");
}
