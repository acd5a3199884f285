use crate::models::team::Team;
use crate::output::color::ColorWriter;
use crate::report::ChannelReport;
use std::io::Result;
use termcolor::Color;

/// Spaces added after the longest team name.
pub const NAME_PADDING: usize = 2;

const FIELD_WIDTH: usize = 10;

/// Width of the team-name column: longest name (in characters) plus padding.
pub fn team_column_width(teams: &[Team]) -> usize {
    teams
        .iter()
        .map(|team| team.name.chars().count())
        .max()
        .unwrap_or(0)
        + NAME_PADDING
}

pub fn format_summary(report: &ChannelReport, writer: &mut ColorWriter) -> Result<()> {
    let user = &report.user;

    writer.writeln()?;
    writer.writeln()?;
    writer.print_header("Summary")?;
    writer.print_field("Username", &user.username, FIELD_WIDTH)?;
    writer.print_field("Email", &user.email, FIELD_WIDTH)?;
    writer.print_field("Name", &user.full_name(), FIELD_WIDTH)?;
    writer.print_field("Nickname", &user.nickname, FIELD_WIDTH)?;
    writer.writeln()?;

    writer.print_header("Teams")?;
    let width = team_column_width(&user.teams);
    for team in &user.teams {
        writer.write(&format!("{:<width$} : ", team.name, width = width))?;
        writer.print_colored(&team.channel_count.to_string(), Color::Yellow)?;
        writer.writeln()?;
    }

    writer.writeln()?;
    writer.write("Direct Message Channels : ")?;
    writer.print_colored(&report.direct_messages.to_string(), Color::Yellow)?;
    writer.writeln()?;

    writer.writeln()?;
    writer.write("Total channel count     : ")?;
    writer.print_bold(&report.total_channels().to_string())?;
    writer.writeln()?;
    writer.writeln()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;

    fn team(name: &str, channel_count: u32) -> Team {
        Team {
            name: name.to_string(),
            id: name.to_lowercase(),
            channel_count,
        }
    }

    fn user(teams: Vec<Team>) -> User {
        User {
            id: "u1".to_string(),
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            nickname: "JD".to_string(),
            teams,
        }
    }

    fn render(report: &ChannelReport) -> String {
        let mut writer = ColorWriter::new(true);
        format_summary(report, &mut writer).unwrap();
        writer.into_string().unwrap()
    }

    #[test]
    fn test_full_summary() {
        let report = ChannelReport {
            user: user(vec![team("General", 5), team("Ops", 3)]),
            direct_messages: 2,
        };

        let expected = "\n\nSummary\n=======\n\n\
                        Username: jdoe\n\
                        Email:    jdoe@example.com\n\
                        Name:     Jane Doe\n\
                        Nickname: JD\n\n\
                        Teams\n=====\n\n\
                        General   : 5\n\
                        Ops       : 3\n\n\
                        Direct Message Channels : 2\n\n\
                        Total channel count     : 10\n\n";

        assert_eq!(render(&report), expected);
    }

    #[test]
    fn test_no_teams() {
        let report = ChannelReport {
            user: user(Vec::new()),
            direct_messages: 4,
        };
        assert_eq!(team_column_width(&report.user.teams), NAME_PADDING);

        let output = render(&report);
        assert!(output.contains("Teams\n=====\n\n\nDirect Message Channels : 4\n"));
        assert!(output.contains("Total channel count     : 4\n"));
    }

    #[test]
    fn test_count_column_is_aligned() {
        let report = ChannelReport {
            user: user(vec![
                team("A", 1),
                team("Engineering Platform", 12),
                team("Ops", 300),
            ]),
            direct_messages: 0,
        };

        let output = render(&report);
        let offsets: Vec<usize> = output
            .lines()
            .skip_while(|line| *line != "=====")
            .skip(2)
            .take_while(|line| !line.is_empty())
            .map(|line| line.find(" : ").unwrap())
            .collect();

        assert_eq!(offsets.len(), 3);
        assert!(offsets.iter().all(|&offset| offset == "Engineering Platform".len() + 2));
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        assert_eq!(team_column_width(&[team("Équipe", 0)]), 8);
    }
}
