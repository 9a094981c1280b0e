use std::fmt::Write as _;

use anyhow::Context;
use celeste_config::Config;
use celeste_core::{Capability, Provider, list_models};
use celeste_tts::{Language, SpeechRequest, Voice, VoiceRegistry, generate_with_timeout};

use crate::args::SpeakArgs;

/// Languages are listed in full up to this many, otherwise only counted
const MAX_LISTED_LANGUAGES: usize = 10;

pub fn providers(registry: &VoiceRegistry, language: Option<Language>) {
    let providers = registry.list_voice_providers(language);

    if providers.is_empty() {
        eprintln!("No providers offer voices for {}", describe_language(language));
        return;
    }

    for provider in providers {
        println!("{provider}");
    }
}

pub fn models(provider: Option<Provider>) {
    for model in list_models(provider, Some(Capability::TextToSpeech)) {
        println!("{:<8} {:<30} {}", model.provider, model.id, model.display_name);
    }
}

pub fn voices(
    registry: &VoiceRegistry,
    provider: Option<Provider>,
    language: Option<Language>,
    json: bool,
) -> anyhow::Result<()> {
    let voices = registry.list_voices(provider, language);

    if json {
        println!("{}", serde_json::to_string_pretty(&voices)?);
        return Ok(());
    }

    if voices.is_empty() {
        let provider = provider.map_or_else(|| "any provider".to_string(), |p| p.to_string());
        eprintln!(
            "No voices found for {provider} with language filter: {}",
            describe_language(language)
        );
        return Ok(());
    }

    for (index, voice) in voices.iter().enumerate() {
        println!(
            "{:>3}. {} [{}/{}]",
            index + 1,
            voice.display_name,
            voice.provider,
            voice.id
        );
    }

    Ok(())
}

pub fn voice(registry: &VoiceRegistry, provider: Provider, id: &str) -> anyhow::Result<()> {
    let Some(voice) = registry.get_voice(provider, id) else {
        anyhow::bail!("No voice '{id}' found for provider '{provider}'");
    };

    print!("{}", describe_voice(voice));
    Ok(())
}

pub async fn speak(config: &Config, registry: &VoiceRegistry, args: SpeakArgs) -> anyhow::Result<()> {
    if args.text.trim().is_empty() {
        anyhow::bail!("Please enter some text to convert to speech");
    }

    let Some(voice) = registry.get_voice(args.provider, &args.voice) else {
        anyhow::bail!(
            "No voice '{}' found for provider '{}', run `celeste voices --provider {}` to list them",
            args.voice,
            args.provider,
            args.provider
        );
    };

    if let Some(language) = args.language.filter(|l| !voice.supports_language(*l)) {
        anyhow::bail!("Voice '{}' does not support language {language}", voice.id);
    }

    let client = celeste_tts::build_client(config, args.provider, args.model.as_deref())?;

    let mut request = SpeechRequest::new(args.text, voice.id.clone());
    if let Some(sample_rate) = args.sample_rate {
        request = request.with_sample_rate(sample_rate);
    }
    let requested_rate = request.sample_rate_or_default();

    tracing::info!(
        provider = %client.provider(),
        model = client.model(),
        voice = %voice.id,
        "generating speech"
    );

    let artifact = generate_with_timeout(client.as_ref(), request, config.tts.timeout()?)
        .await
        .context("Speech generation failed")?;

    std::fs::write(&args.output, &artifact.data)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Wrote {} bytes to {}", artifact.len(), args.output.display());
    println!("Format:      {}", artifact.format_or_wav());
    println!("Sample rate: {} Hz", artifact.sample_rate_or(requested_rate));
    println!("Channels:    {}", artifact.channels_or_mono());

    Ok(())
}

fn describe_language(language: Option<Language>) -> String {
    language.map_or_else(|| "All Languages".to_string(), |l| l.to_string())
}

fn describe_voice(voice: &Voice) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Voice ID:  {}", voice.id);
    let _ = writeln!(out, "Name:      {}", voice.display_name);
    let _ = writeln!(out, "Provider:  {}", voice.provider);
    let _ = writeln!(out, "Style:     {}", voice.description);
    let _ = writeln!(out, "Languages: {} supported", voice.languages.len());

    if voice.languages.len() <= MAX_LISTED_LANGUAGES {
        let tags: Vec<&str> = voice.languages.iter().map(|l| l.as_str()).collect();
        let _ = writeln!(out, "Supported: {}", tags.join(", "));
    }

    out
}

#[cfg(test)]
mod tests {
    use celeste_tts::{SynthesisError, TtsError};

    use super::*;

    #[test]
    fn short_language_lists_are_spelled_out() {
        let voice = Voice::new(
            Provider::Google,
            "v1",
            "Voice One",
            "Firm",
            [Language::EnglishUs, Language::JapaneseJapan],
        );

        let text = describe_voice(&voice);
        assert!(text.contains("Languages: 2 supported"));
        assert!(text.contains("Supported: en-US, ja-JP"));
    }

    #[test]
    fn long_language_lists_are_counted() {
        let registry = VoiceRegistry::with_catalog();
        let voice = registry.get_voice(Provider::Google, "Kore").unwrap();

        let text = describe_voice(voice);
        assert!(text.contains("Languages: 24 supported"));
        assert!(!text.contains("Supported:"));
    }

    #[tokio::test]
    async fn blank_text_is_rejected_before_any_client_exists() {
        let args = SpeakArgs {
            provider: Provider::Google,
            voice: "Kore".to_owned(),
            model: None,
            language: None,
            sample_rate: None,
            output: tempfile::tempdir().unwrap().path().join("out.wav"),
            text: "   ".to_owned(),
        };

        let err = speak(&Config::default(), &VoiceRegistry::with_catalog(), args)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Please enter some text"));
    }

    #[tokio::test]
    async fn unknown_voice_is_reported() {
        let args = SpeakArgs {
            provider: Provider::Google,
            voice: "alloy".to_owned(),
            model: None,
            language: None,
            sample_rate: None,
            output: tempfile::tempdir().unwrap().path().join("out.wav"),
            text: "Hello".to_owned(),
        };

        let err = speak(&Config::default(), &VoiceRegistry::with_catalog(), args)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No voice 'alloy'"));
    }

    #[tokio::test]
    async fn missing_credential_is_a_synthesis_failure() {
        let args = SpeakArgs {
            provider: Provider::Google,
            voice: "Kore".to_owned(),
            model: None,
            language: Some(Language::EnglishUs),
            sample_rate: None,
            output: tempfile::tempdir().unwrap().path().join("out.wav"),
            text: "Hello".to_owned(),
        };

        let err = speak(&Config::default(), &VoiceRegistry::with_catalog(), args)
            .await
            .unwrap_err();
        let tts = err.downcast_ref::<TtsError>().unwrap();
        assert!(tts.is_synthesis_failure());
        assert!(matches!(tts.synthesis_cause(), Some(SynthesisError::AuthenticationFailed(_))));
    }
}
