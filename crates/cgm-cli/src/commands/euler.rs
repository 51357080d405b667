//! Euler command - angles to matrix and quaternion

use crate::EulerArgs;
use anyhow::Result;
use cgm_math::{EulerMode, Mat4, Quat};
use serde_json::json;
use tracing::{debug, info};

pub fn run(args: EulerArgs, json: bool) -> Result<()> {
    let mode: EulerMode = args.mode.parse()?;
    let [a, b, c] = [args.a, args.b, args.c].map(|v| super::to_radians(v, args.degrees));
    info!(%mode, a, b, c, "euler rotation");

    let m = Mat4::rotation_euler(a, b, c, mode);
    let q = Quat::from_mat4(&m);
    debug!(proper = mode.is_proper(), axes = ?mode.axes(), "ordering");

    if json {
        let doc = json!({
            "mode": mode.name(),
            "rows": super::matrix_rows(&m),
            "quat": q.to_array(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Mode: {} ({})", mode, if mode.is_proper() { "proper Euler" } else { "Tait-Bryan" });
    println!("Matrix:");
    super::print_matrix(&m);
    println!("Quaternion: [{} ]", super::fmt_components(&q.to_array()));
    Ok(())
}
