use shadow_rs::BuildPattern;
use shadow_rs::ShadowBuilder;

fn main() -> std::io::Result<()> {
    // Only `CLAP_LONG_VERSION` and the package metadata are read by the binary.
    ShadowBuilder::builder()
        .build_pattern(BuildPattern::Lazy)
        .deny_const(Default::default())
        .build()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    Ok(())
}
