// Assembles the deployable site: mirrors `static/` (markup, stylesheet and
// the wasm-pack output under `static/pkg`) into `dist/`.
use std::path::Path;
use std::{env, fs};

use fs_extra::dir::CopyOptions;

fn main() {
    println!("cargo:rerun-if-changed=static");

    // The wasm-pack invocation itself lives in src/main.rs; when cross
    // compiling the library there is nothing to assemble.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        println!("cargo:warning=static/ missing – nothing to copy into dist/");
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let options = CopyOptions::new().content_only(true).overwrite(true);
    if let Err(err) = fs_extra::dir::copy(static_dir, out_dir, &options) {
        println!("cargo:warning=failed to copy static assets: {err}");
    }
}
