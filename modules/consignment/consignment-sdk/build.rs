fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/shippy/consignment/v1/consignment.proto");
    println!("cargo:rerun-if-changed=proto");

    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR")?);

    tonic_prost_build::configure()
        .file_descriptor_set_path(out_dir.join("consignment_descriptor.bin"))
        .build_client(true)
        .build_server(true)
        .type_attribute(
            ".shippy.consignment.v1.Consignment",
            "#[derive(serde::Serialize, serde::Deserialize)] #[serde(default)]",
        )
        .type_attribute(
            ".shippy.consignment.v1.Container",
            "#[derive(serde::Serialize, serde::Deserialize)] #[serde(default)]",
        )
        .compile_protos(&["proto/shippy/consignment/v1/consignment.proto"], &["proto"])?;

    Ok(())
}
