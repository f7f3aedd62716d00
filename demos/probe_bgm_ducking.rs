use reeltime::{AudioEnvelope, BgmOptions, Movie, OpeningEndingOptions, SceneOptions, SceneSource};

fn main() -> anyhow::Result<()> {
    let mut movie = Movie::default();
    movie.opening(Some(4.0), OpeningEndingOptions::new("op.png"));
    movie.scene(SceneSource::Blank, SceneOptions::default().duration(20.0));
    movie.ending(Some(4.0), OpeningEndingOptions::new("ed.png"));
    movie.bgm("music.mp3", BgmOptions::default());

    let timeline = movie.build();
    let Some(bgm) = timeline.audios.first() else {
        anyhow::bail!("no bgm track");
    };
    let envelope = AudioEnvelope::for_track(bgm, &timeline);

    let step = timeline.fps.as_f64() as u64;
    for frame in (0..=timeline.duration_in_frames).step_by(step.max(1) as usize) {
        let gain = envelope.gain_at_frame(frame);
        let bar = "#".repeat((gain * 40.0).round() as usize);
        println!("{:>6.2}s {gain:.3} {bar}", timeline.fps.frames_to_secs(frame));
    }
    Ok(())
}
