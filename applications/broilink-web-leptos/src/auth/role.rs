use std::fmt;

/// User roles issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Owner,
    Peternak,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Admin" => Some(Self::Admin),
            "Owner" => Some(Self::Owner),
            "Peternak" => Some(Self::Peternak),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Owner => "Owner",
            Self::Peternak => "Peternak",
        }
    }

    /// Route a freshly logged-in user lands on
    pub fn landing_route(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Owner => "/owner/dashboard",
            Self::Peternak => "/peternak",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_routes() {
        assert_eq!(Role::parse("Admin").unwrap().landing_route(), "/admin/dashboard");
        assert_eq!(Role::parse("Owner").unwrap().landing_route(), "/owner/dashboard");
        assert_eq!(Role::parse("Peternak").unwrap().landing_route(), "/peternak");
    }

    #[test]
    fn test_unknown_roles_are_rejected() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("Superuser"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for role in [Role::Admin, Role::Owner, Role::Peternak] {
            assert_eq!(Role::parse(&role.to_string()), Some(role));
        }
    }
}
