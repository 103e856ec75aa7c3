use fixturegen::ImageFixtureGenerator;

fn main() -> anyhow::Result<()> {
    ImageFixtureGenerator::new().generate()?;
    Ok(())
}
