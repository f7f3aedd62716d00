use reeltime::{
    Direction, Movie, MovieOptions, OpeningEndingOptions, SceneEffect, SceneOptions, SceneSource,
    TelopOptions, TransitionKind, TransitionOptions, VideoSize, WipeOptions,
};

fn main() -> anyhow::Result<()> {
    let mut movie = Movie::new(
        MovieOptions::default()
            .size(VideoSize::Shorts)
            .default_transition(TransitionKind::Fade, Some(1.0)),
    );

    movie
        .opening(Some(3.0), OpeningEndingOptions::new("title.png").effect(SceneEffect::FadeIn))
        .telop("Summer trip", TelopOptions::default().position("center"));

    let beach = movie
        .scene("beach.mp4", SceneOptions::default().display_mode("cinemascope"))
        .telop("Arrived at the beach", TelopOptions::default())
        .telop("The water was cold", TelopOptions::default().after(1.0))
        .wipe("reaction.mp4", WipeOptions::default())
        .key()
        .to_owned();

    let dinner = movie
        .scene(SceneSource::Blank, SceneOptions::default().background_color("#101820"))
        .telops(&["Dinner", "Sunset"], &[0.0, 0.0], TelopOptions::default().duration(2.5))
        .key()
        .to_owned();

    if let Some(scene) = movie.scene_mut(&beach) {
        scene.transition_to(&dinner, TransitionOptions::new(2.0, TransitionKind::Slide(Direction::Left)));
    }

    movie.ending(Some(2.0), OpeningEndingOptions::new("credits.png"));

    let timeline = movie.build();
    println!("{}", serde_json::to_string_pretty(&timeline)?);
    eprintln!("fingerprint {:016x}", timeline.fingerprint()?);
    Ok(())
}
