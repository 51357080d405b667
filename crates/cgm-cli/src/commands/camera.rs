//! Camera command - view and projection matrices

use crate::{CameraArgs, CameraKind};
use anyhow::Result;
use cgm_math::Mat4;
use serde_json::json;
use tracing::info;

pub fn run(args: CameraArgs, json: bool) -> Result<()> {
    let mats: Vec<(&str, Mat4)> = match args.kind {
        CameraKind::LookAt => {
            let eye = super::parse_vec3(&args.eye)?;
            let target = super::parse_vec3(&args.target)?;
            let up = super::parse_vec3(&args.up)?;
            info!(?eye, ?target, ?up, "look-at");
            vec![
                ("camera", Mat4::look_at(eye, target, up)),
                ("view", Mat4::inv_look_at(eye, target, up)),
            ]
        }
        CameraKind::Perspective => {
            info!(fov = args.fov, aspect = args.aspect, near = args.near, far = args.far, "perspective");
            vec![("projection", Mat4::perspective(args.fov.to_radians(), args.aspect, args.near, args.far))]
        }
        CameraKind::Frustum | CameraKind::Ortho => {
            let [l, r, b, t] = bounds(&args.bounds)?;
            info!(l, r, b, t, near = args.near, far = args.far, "view volume");
            let m = match args.kind {
                CameraKind::Frustum => Mat4::frustum(l, r, b, t, args.near, args.far),
                _ => Mat4::ortho(l, r, b, t, args.near, args.far),
            };
            vec![("projection", m)]
        }
    };

    if json {
        let doc: serde_json::Map<String, serde_json::Value> = mats
            .iter()
            .map(|(name, m)| (name.to_string(), json!(super::matrix_rows(m))))
            .collect();
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    for (name, m) in &mats {
        println!("{}:", name);
        super::print_matrix(m);
    }
    Ok(())
}

fn bounds(s: &str) -> Result<[f32; 4]> {
    let v = super::parse_floats(s)?;
    <[f32; 4]>::try_from(v.as_slice())
        .map_err(|_| anyhow::anyhow!("--bounds needs LEFT,RIGHT,BOTTOM,TOP, got '{}'", s))
}
