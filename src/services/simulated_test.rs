use super::*;

#[tokio::test]
async fn generate_embeds_literal_prompt() {
    let generator = PlaceholderGenerator::new(Duration::ZERO);
    let prompt = "A poll about \"tabs vs spaces\"";
    let artifact = generator.generate(prompt).await.unwrap();
    assert_eq!(artifact.prompt, prompt);
    assert!(artifact.source.contains(prompt));
    assert!(artifact.source.contains("// Generated from prompt: \"A poll about \"tabs vs spaces\"\""));
    assert!(artifact.source.contains("export default function MyFrame()"));
}

#[tokio::test]
async fn generate_is_deterministic() {
    let generator = PlaceholderGenerator::new(Duration::ZERO);
    let a = generator.generate("quiz").await.unwrap();
    let b = generator.generate("quiz").await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn generate_rejects_blank_prompt() {
    let generator = PlaceholderGenerator::new(Duration::ZERO);
    assert_eq!(generator.generate("  \n").await, Err(ServiceError::EmptyPrompt));
}

#[tokio::test]
async fn generate_waits_for_configured_delay() {
    let generator = PlaceholderGenerator::new(Duration::from_millis(30));
    let started = std::time::Instant::now();
    generator.generate("meme").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(30));
}

#[tokio::test]
async fn deploy_returns_configured_url() {
    let deployer = SimulatedDeployer::new(Duration::ZERO, "https://vibes-frame-12345.modal.run".to_owned());
    let artifact = CodeArtifact { prompt: "p".to_owned(), source: "export default 1".to_owned() };
    let first = deployer.deploy(&artifact).await.unwrap();
    let second = deployer.deploy(&artifact).await.unwrap();
    assert_eq!(first.url, "https://vibes-frame-12345.modal.run");
    assert_eq!(first, second);
}

#[tokio::test]
async fn deploy_rejects_empty_source() {
    let deployer = SimulatedDeployer::new(Duration::ZERO, "https://x.test".to_owned());
    let artifact = CodeArtifact { prompt: "p".to_owned(), source: "   ".to_owned() };
    assert_eq!(deployer.deploy(&artifact).await, Err(ServiceError::EmptyArtifact));
}
