use crate::{
    description::payload::{
        DialogueData, GameInfoData, HighlightData, LeaderCategory, LineBoxData, PlayerCardData,
        TeamLeadersData,
    },
    foundation::core::{Fps, FrameIndex},
    foundation::error::{RewindError, RewindResult},
    render::node::{
        AudioNode, GameInfoNode, InningColumn, LeaderColumn, PlayerBioNode, RenderNode,
        ScoreboardNode, TeamLeadersNode, VideoNode,
    },
    timing::timestamp::to_frames,
};

#[derive(Clone, Copy, Debug)]
/// Per-call context handed to a [`ComponentRenderer`].
pub struct RenderCtx<'a> {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Canonical id of the section being rendered.
    pub section_id: &'a str,
    /// Gain for narration audio.
    pub dialogue_volume: f64,
    /// Gain for highlight clip audio.
    pub highlight_volume: f64,
}

/// Render hooks, one per component kind.
///
/// Each method receives an already-parsed payload. Returning `Err` never aborts the
/// timeline: the dispatcher substitutes a placeholder for that component only.
pub trait ComponentRenderer {
    /// Narration audio.
    fn dialogue(&self, data: &DialogueData, ctx: &RenderCtx<'_>) -> RewindResult<RenderNode>;
    /// Scoreboard.
    fn line_box(&self, data: &LineBoxData, ctx: &RenderCtx<'_>) -> RewindResult<RenderNode>;
    /// Player profile.
    fn player_card(&self, data: &PlayerCardData, ctx: &RenderCtx<'_>)
    -> RewindResult<RenderNode>;
    /// Game summary.
    fn game_info_card(&self, data: &GameInfoData, ctx: &RenderCtx<'_>)
    -> RewindResult<RenderNode>;
    /// Trimmed highlight clip.
    fn highlight_video(
        &self,
        data: &HighlightData,
        ctx: &RenderCtx<'_>,
    ) -> RewindResult<RenderNode>;
    /// Team leaders.
    fn team_leaders(&self, data: &TeamLeadersData, ctx: &RenderCtx<'_>)
    -> RewindResult<RenderNode>;
}

#[derive(Clone, Copy, Debug, Default)]
/// Renderer producing plain [`RenderNode`] descriptors.
pub struct DefaultRenderer;

impl ComponentRenderer for DefaultRenderer {
    fn dialogue(&self, data: &DialogueData, ctx: &RenderCtx<'_>) -> RewindResult<RenderNode> {
        Ok(RenderNode::Audio(AudioNode {
            src: data.url.clone(),
            volume: ctx.dialogue_volume,
            start_from: FrameIndex(0),
            looped: false,
        }))
    }

    fn line_box(&self, data: &LineBoxData, _ctx: &RenderCtx<'_>) -> RewindResult<RenderNode> {
        let board = &data.score.scoreboard;
        let current = if board.current_inning != -1 {
            Some(board.current_inning)
        } else {
            data.current_inning
        };

        let innings = board
            .innings
            .iter()
            .map(|line| InningColumn {
                inning: line.inning,
                home_runs: line.home.runs.runs(),
                away_runs: line.away.runs.runs(),
                highlighted: current == Some(i64::from(line.inning)),
            })
            .collect();

        let t = &board.totals;
        Ok(RenderNode::Scoreboard(ScoreboardNode {
            home_team: data.score.home_team.canonical(),
            away_team: data.score.away_team.canonical(),
            innings,
            home_totals: [t.home.runs, t.home.hits, t.home.errors],
            away_totals: [t.away.runs, t.away.hits, t.away.errors],
        }))
    }

    fn player_card(
        &self,
        data: &PlayerCardData,
        _ctx: &RenderCtx<'_>,
    ) -> RewindResult<RenderNode> {
        let p = &data.data;
        let name = p
            .name
            .clone()
            .ok_or_else(|| RewindError::payload("player profile has no name"))?;
        let title = match &p.nickname {
            Some(nick) if !nick.trim().is_empty() => format!("{name} ({nick})"),
            _ => name,
        };

        let mut facts = Vec::new();
        let mut fact = |label: &str, value: Option<String>| {
            if let Some(v) = value {
                facts.push((label.to_string(), v));
            }
        };
        fact("Position", p.position.clone());
        fact("Age", p.age.as_ref().map(|v| v.canonical()));
        fact("Height", p.height.clone());
        fact("Weight", p.weight.as_ref().map(|v| format!("{v} lbs")));
        fact(
            "Bats/Throws",
            match (&p.bats, &p.throws) {
                (None, None) => None,
                (b, t) => Some(format!(
                    "{} / {}",
                    b.as_deref().unwrap_or("-"),
                    t.as_deref().unwrap_or("-")
                )),
            },
        );
        fact("Years in MLB", p.years_in_mlb.as_ref().map(|v| v.canonical()));

        Ok(RenderNode::PlayerBio(PlayerBioNode {
            title,
            headshot_url: p.headshot_url.clone(),
            facts,
            summary: data.player_match_summary.clone(),
            profile_url: p.mlb_profile_url.clone(),
        }))
    }

    fn game_info_card(
        &self,
        data: &GameInfoData,
        _ctx: &RenderCtx<'_>,
    ) -> RewindResult<RenderNode> {
        Ok(RenderNode::GameInfo(GameInfoNode {
            home_team: data.home_team_name.clone(),
            home_logo_url: data.home_team_logo_url.clone(),
            away_team: data.away_team_name.clone(),
            away_logo_url: data.away_team_logo_url.clone(),
            location: data.location.clone(),
            starts_at: data.date_and_time.clone(),
        }))
    }

    fn highlight_video(
        &self,
        data: &HighlightData,
        ctx: &RenderCtx<'_>,
    ) -> RewindResult<RenderNode> {
        if data.url.trim().is_empty() {
            return Err(RewindError::payload("highlight clip has no url"));
        }
        let start_from = to_frames(&data.vid_time.start, ctx.fps)?;
        let end_at = to_frames(&data.vid_time.end, ctx.fps)?;
        if end_at < start_from {
            return Err(RewindError::payload(format!(
                "highlight clip ends ({}) before it starts ({})",
                data.vid_time.end, data.vid_time.start
            )));
        }

        Ok(RenderNode::Video(VideoNode {
            src: data.url.clone(),
            start_from,
            end_at,
            volume: ctx.highlight_volume,
            title: data.title.clone(),
        }))
    }

    fn team_leaders(
        &self,
        data: &TeamLeadersData,
        _ctx: &RenderCtx<'_>,
    ) -> RewindResult<RenderNode> {
        let heading = match &data.team_details.name {
            Some(name) => format!("{name} Leaders"),
            None => "Team Leaders".to_string(),
        };
        let column = |title: &str, stat: &str, category: &LeaderCategory| LeaderColumn {
            title: title.to_string(),
            stat: stat.to_string(),
            rows: category
                .leaders()
                .iter()
                .map(|l| (l.person.full_name.clone(), l.value.canonical()))
                .collect(),
        };
        let champs = &data.champs;

        Ok(RenderNode::TeamLeaders(TeamLeadersNode {
            heading,
            logo_url: data.team_details.logo.clone(),
            columns: vec![
                column("OPS Leaders", "OPS", &champs.on_base_plus_slugging),
                column("ERA Leaders", "ERA", &champs.earned_run_average),
                column("Fielding Leaders", "Fielding %", &champs.fielding_percentage),
            ],
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/hooks.rs"]
mod tests;
