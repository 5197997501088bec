#![allow(dead_code)]

use orrery::assets::{AssetLocator, MemorySource};
use std::path::PathBuf;

const GLB_MAGIC: u32 = 0x4654_6C67;
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;

pub const MODELS: [&str; 3] = ["basketball", "hoop", "spaceshuttle"];

/// A binary glTF with one node holding a single triangle.
pub fn triangle_glb(node_name: &str) -> Vec<u8> {
    let positions: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let bin: Vec<u8> = positions
        .iter()
        .flatten()
        .flat_map(|f| f.to_le_bytes())
        .collect();

    let json = format!(
        r#"{{"asset":{{"version":"2.0"}},"scene":0,"scenes":[{{"nodes":[0]}}],"nodes":[{{"name":"{node_name}","mesh":0}}],"meshes":[{{"primitives":[{{"attributes":{{"POSITION":0}}}}]}}],"buffers":[{{"byteLength":{len}}}],"bufferViews":[{{"buffer":0,"byteOffset":0,"byteLength":{len}}}],"accessors":[{{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0.0,0.0,0.0],"max":[1.0,1.0,0.0]}}]}}"#,
        len = bin.len(),
    );

    glb(&json, Some(&bin))
}

/// A valid binary glTF that has no scenes at all.
pub fn sceneless_glb() -> Vec<u8> {
    glb(r#"{"asset":{"version":"2.0"}}"#, None)
}

fn glb(json: &str, bin: Option<&[u8]>) -> Vec<u8> {
    let mut json = json.as_bytes().to_vec();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    let bin = bin.map(|b| {
        let mut b = b.to_vec();
        while b.len() % 4 != 0 {
            b.push(0);
        }
        b
    });

    let total = 12 + 8 + json.len() + bin.as_ref().map_or(0, |b| 8 + b.len());

    let mut out = Vec::with_capacity(total);
    out.extend(GLB_MAGIC.to_le_bytes());
    out.extend(2u32.to_le_bytes());
    out.extend((total as u32).to_le_bytes());

    out.extend((json.len() as u32).to_le_bytes());
    out.extend(CHUNK_JSON.to_le_bytes());
    out.extend(&json);

    if let Some(bin) = bin {
        out.extend((bin.len() as u32).to_le_bytes());
        out.extend(CHUNK_BIN.to_le_bytes());
        out.extend(&bin);
    }

    out
}

/// In-memory source holding a triangle model for each identifier, at the default locations.
pub fn memory_source(identifiers: &[&str]) -> MemorySource {
    let locator = AssetLocator::default();
    let source = MemorySource::new();
    for id in identifiers {
        source.insert(locator.locate(id), triangle_glb(id));
    }
    source
}

/// Fresh, empty directory under the system temp dir.
pub fn temp_asset_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("orrery-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
