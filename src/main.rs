//! Host-side helper: `cargo run` compiles the WASM bundle, assembles the
//! static site into `dist/`, and serves it on a local HTTP port so the
//! landing page can be previewed (and shared via ngrok when installed).

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const PORT: &str = "8000";

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    build_wasm_bundle();
    serve_dist();
}

/// Compile the wasm module into `static/pkg`; `build.rs` then folds the
/// whole `static/` tree into `dist/`.
fn build_wasm_bundle() {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    // Re-run the asset copy so dist/ picks up the fresh pkg.
    let status = Command::new("cargo")
        .args(["build", "--release"])
        .status()
        .expect("failed to run cargo build");
    if !status.success() {
        eprintln!("cargo build failed");
        std::process::exit(1);
    }
}

fn serve_dist() {
    println!("Launching local server at http://127.0.0.1:{PORT} …");
    let _server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "dist"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    // Expose the page over the internet when ngrok is available.
    match Command::new("ngrok")
        .args(["http", PORT])
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(_) => println!("ngrok tunnel starting …"),
        Err(_) => eprintln!("ngrok not found. Install it to expose the site over the internet."),
    }

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
