//! Le build script.

use std::error::Error;
use std::process::Command;
use std::str;


/// Environment variable that the current revision is passed through to the crate code.
const REVISION_VAR: &str = "X_GREETSH_REVISION";


fn main() {
    // Obtain Git SHA to pass it further to the crate code via option_env!().
    match git_head_sha() {
        Ok(ref rev) if !rev.is_empty() => println!("cargo:rustc-env={}={}", REVISION_VAR, rev),
        Ok(_) => println!("cargo:warning=Not building from a Git repository"),
        Err(e) => println!("cargo:warning=Failed to obtain current Git SHA: {}", e),
    };
}

fn git_head_sha() -> Result<String, Box<dyn Error>> {
    let mut cmd = Command::new("git");
    cmd.args(&["rev-parse", "--short", "HEAD"]);

    let output = cmd.output()?;
    if !output.status.success() {
        return Ok(String::new());
    }
    let sha = str::from_utf8(&output.stdout[..])?.trim().to_owned();
    Ok(sha)
}
