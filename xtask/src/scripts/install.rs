use crate::cli;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn install(args: &cli::InstallArgs) -> Result<()> {
    let root = workspace_root();

    println!("Building {} in release mode...", args.name);

    // Build the binary for the current target
    cmd!("cargo", "build", "--bin", &args.name, "--release")
        .dir(&root)
        .run()?;

    let prefix = match &args.prefix {
        Some(path) => PathBuf::from(path),
        None => {
            let home = env::var("HOME")
                .or_else(|_| env::var("USERPROFILE"))
                .map_err(|_| eyre!("Could not determine home directory, pass --prefix"))?;
            PathBuf::from(home).join(".local")
        }
    };

    let bin_dir = prefix.join("bin");
    let man_dir = prefix.join("share").join("man").join("man1");

    for dir in [&bin_dir, &man_dir] {
        if !dir.exists() {
            println!("Creating directory: {}", dir.display());
            fs::create_dir_all(dir)?;
        }
    }

    // Binary
    let binary_name = &args.name;
    let source_path = root.join("target").join("release").join(binary_name);
    let dest_path = bin_dir.join(binary_name);

    println!("Installing {} to {}", binary_name, dest_path.display());
    fs::copy(&source_path, &dest_path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&dest_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&dest_path, perms)?;
    }

    // Fix macOS code signing issues
    #[cfg(target_os = "macos")]
    {
        let _ = cmd!("xattr", "-cr", &dest_path).run();

        if let Err(e) = cmd!("codesign", "--force", "--sign", "-", &dest_path).run() {
            eprintln!("Warning: Failed to re-sign binary: {e}");
            eprintln!(
                "You may need to run: codesign --force --sign - {}",
                dest_path.display()
            );
        }
    }

    // Manual page
    let page = format!("{binary_name}.1");
    let man_source = root.join("man").join("man1").join(&page);
    if man_source.exists() {
        let man_dest = man_dir.join(&page);
        println!("Installing manual page to {}", man_dest.display());
        fs::copy(&man_source, &man_dest)?;
    } else {
        eprintln!("Warning: no manual page at {}", man_source.display());
    }

    println!(
        "✓ Successfully installed {} to {}",
        binary_name,
        prefix.display()
    );

    // Check if the install directory is in PATH
    if let Ok(path_var) = env::var("PATH") {
        if !env::split_paths(&path_var).any(|p| p == bin_dir) {
            println!("\nNote: {} is not in your PATH.", bin_dir.display());
            println!("Add it to your PATH by adding this line to your shell config:");
            println!("  export PATH=\"{}:$PATH\"", bin_dir.display());
        }
    }

    Ok(())
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
