//! Refract command - reflection and refraction of a direction

use crate::RefractArgs;
use anyhow::Result;
use cgm_math::Error;
use serde_json::json;
use tracing::{info, warn};

pub fn run(args: RefractArgs, json: bool) -> Result<()> {
    let i = super::parse_vec3(&args.incident)?.normalize();
    let n = super::parse_vec3(&args.normal)?.normalize();
    info!(?i, ?n, ior = args.ior, "surface interaction");

    let reflected = i.reflect(n);
    let refracted = match i.refract(n, args.ior) {
        Ok(r) => Some(r),
        Err(e @ Error::TotalInternalReflection { .. }) => {
            warn!("{}", e);
            None
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        let doc = json!({
            "reflected": reflected.to_array(),
            "refracted": refracted.map(|r| r.to_array()),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Reflected: [{} ]", super::fmt_components(&reflected.to_array()));
    match refracted {
        Some(r) => println!("Refracted: [{} ]", super::fmt_components(&r.to_array())),
        None => println!("Refracted: total internal reflection"),
    }
    Ok(())
}
