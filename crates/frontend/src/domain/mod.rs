pub mod a100_team_member;
