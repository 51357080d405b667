//! Rotate command - rotate a vector by axis/angle, quaternion or Euler angles

use crate::RotateArgs;
use anyhow::{Result, bail};
use cgm_math::Axis;
use serde_json::json;
use tracing::{debug, info};

pub fn run(args: RotateArgs, json: bool) -> Result<()> {
    let v = super::parse_vec3(&args.vector)?;
    let angle = super::to_radians(args.angle, args.degrees);

    let out = if let Some(axis) = &args.axis {
        // Principal axis by name, or any direction
        match axis.parse::<Axis>() {
            Ok(a) => {
                info!(axis = %a, angle, "principal axis rotation");
                v.rotate_axis(a, angle)
            }
            Err(_) => {
                let axis = super::parse_vec3(axis)?;
                info!(?axis, angle, "axis rotation");
                v.rotate(angle, axis)
            }
        }
    } else if let Some(q) = &args.quat {
        let q = super::parse_quat(q)?;
        info!(?q, "quaternion rotation");
        v.rotate_quat(q)
    } else if let Some(e) = &args.euler {
        let (mode, [a, b, c]) = super::parse_euler(e, args.degrees)?;
        info!(%mode, a, b, c, "euler rotation");
        v.rotate_euler(a, b, c, mode)
    } else {
        bail!("One of --axis, --quat or --euler is required");
    };
    debug!(length_in = v.length(), length_out = out.length(), "rotated");

    if json {
        println!("{}", serde_json::to_string_pretty(&json!({ "vector": out.to_array() }))?);
    } else {
        println!("[{} ]", super::fmt_components(&out.to_array()));
    }
    Ok(())
}
