use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use bytes::Bytes;

/// Audio container formats the synthesis service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    OggVorbis,
    Pcm,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::OggVorbis => "ogg_vorbis",
            AudioFormat::Pcm => "pcm",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::OggVorbis => "ogg",
            AudioFormat::Pcm => "pcm",
        }
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp3" => Ok(AudioFormat::Mp3),
            "ogg_vorbis" => Ok(AudioFormat::OggVorbis),
            "pcm" => Ok(AudioFormat::Pcm),
            _ => Err(format!("Invalid audio format: {}", s)),
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Call-and-return speech synthesis collaborator; the final stage's external
/// dependency.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        format: AudioFormat,
    ) -> Result<Bytes, SynthesizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}
