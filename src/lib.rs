#![doc = r#"
Turn a Standard MIDI File into a time-indexed event timeline that a host
animation or playback system samples every frame.

# Overview

[`MidiFile::parse`](crate::file::MidiFile::parse) decodes an SMF byte buffer
into one [`TrackTimeline`](crate::file::TrackTimeline) per track chunk: an
ordered, tempo-resolved event sequence plus the scalars needed to map
between ticks and seconds. The timeline is immutable once parsed and safe
to share between any number of playback instances.

A [`TimelinePlayer`](crate::player::TimelinePlayer) evaluates one timeline
per playback instance. Each frame the host hands it the current playback
time and an evaluation mode; the player fires the note signals whose tick
falls inside the advancing window (resolving loop wrap-around, seeks and
scrub jumps) and answers continuous value queries through a
[`MidiControl`](crate::control::MidiControl) binding: control-change
interpolation, note envelopes, or note-triggered response curves.

# Example

```rust
use midi_timeline::prelude::*;

let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, // header chunk
    0, 0, // format (unused)
    0, 1, // one track
    0, 96, // 96 ticks per quarter note
    b'M', b'T', b'r', b'k', 0, 0, 0, 8, // track chunk
    0x00, 0x90, 0x3c, 0x64, // note on, middle C
    0x60, 0x80, 0x3c, 0x40, // note off a quarter note later
];

let file = MidiFile::parse(&bytes)?;
let track = &file.tracks()[0];

// One quarter note, quantized up to a whole 4-beat bar.
assert_eq!(track.duration(), 384);

let mut player = TimelinePlayer::new(track);
let signals = player.evaluate(1.0, EvaluationMode::Playback);
assert!(signals.iter().all(|s| s.event.is_note()));
# Ok::<(), midi_timeline::reader::ReaderError>(())
```
"#]

pub mod control;
pub mod event;
pub mod file;
pub mod player;
pub mod reader;

pub mod prelude;
