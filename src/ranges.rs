use crate::error::TrackError;

/// Reference rate of the source material. Range text is frame indices.
pub const GAME_FPS: f32 = 60.0;

/// One input range, already converted to seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

/// Parses `"<int>-<int>, <int>-<int>, ..."` into seconds, preserving input
/// order (the track schedules notes in this order).
pub fn parse_ranges(text: &str) -> Result<Vec<Span>, TrackError> {
    if text.trim().is_empty() {
        return Err(TrackError::EmptyRanges);
    }

    text.split(',').map(|token| parse_range(token.trim())).collect()
}

fn parse_range(token: &str) -> Result<Span, TrackError> {
    let malformed = || TrackError::MalformedRange(token.to_string());

    let (start, end) = token.split_once('-').ok_or_else(malformed)?;
    let start: u32 = start.trim().parse().map_err(|_| malformed())?;
    let end: u32 = end.trim().parse().map_err(|_| malformed())?;

    Ok(Span {
        start: start as f32 / GAME_FPS,
        end: end as f32 / GAME_FPS,
    })
}
