use super::role::Role;
use crate::modules::chef::repository::Chef;

/// Where a client should navigate once signed in.
#[derive(Debug, Clone, PartialEq)]
pub enum Landing {
    AdminApproval,
    ChefOnboarding,
    ChefDashboard(String),
    AwaitingApproval,
    FoodieHome,
    ProfileSetup,
}

impl Landing {
    /// `None` means the client has nowhere to go and the session must end.
    pub fn path(&self) -> Option<String> {
        match self {
            Self::AdminApproval => Some("/admin-approval".to_string()),
            Self::ChefOnboarding => Some("/chef-onboarding".to_string()),
            Self::ChefDashboard(chef_id) => Some(format!("/chef/dashboard/{}", chef_id)),
            Self::AwaitingApproval => None,
            Self::FoodieHome => Some("/foodie-home".to_string()),
            Self::ProfileSetup => Some("/profile-setup".to_string()),
        }
    }
}

pub fn landing(role: Option<Role>, chef: Option<&Chef>) -> Landing {
    match role {
        Some(Role::Admin) => Landing::AdminApproval,
        Some(Role::Chef) => match chef {
            Some(chef) if chef.business_name.trim().is_empty() => Landing::ChefOnboarding,
            Some(chef) if chef.is_approved => Landing::ChefDashboard(chef.id.clone()),
            Some(_) => Landing::AwaitingApproval,
            None => Landing::ChefOnboarding,
        },
        Some(Role::Foodie) => Landing::FoodieHome,
        None => Landing::ProfileSetup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    fn chef(business_name: &str, is_approved: bool) -> Chef {
        Chef {
            id: "01J0CHEF".to_string(),
            account_id: "01J0ACCOUNT".to_string(),
            business_name: business_name.to_string(),
            location: "Westlands".to_string(),
            bio: None,
            phone: None,
            food_types: Json(vec![]),
            base_location: None,
            delivery_zones: Json(vec![]),
            payout_number: None,
            profile_photo: None,
            is_approved,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn admins_land_on_the_approval_desk() {
        assert_eq!(landing(Some(Role::Admin), None), Landing::AdminApproval);
    }

    #[test]
    fn chefs_without_a_kitchen_go_to_onboarding() {
        assert_eq!(landing(Some(Role::Chef), None), Landing::ChefOnboarding);
        assert_eq!(
            landing(Some(Role::Chef), Some(&chef("  ", true))),
            Landing::ChefOnboarding
        );
    }

    #[test]
    fn approved_chefs_reach_their_dashboard() {
        let landing = landing(Some(Role::Chef), Some(&chef("Mama Oliech", true)));
        assert_eq!(landing.path(), Some("/chef/dashboard/01J0CHEF".to_string()));
    }

    #[test]
    fn unapproved_chefs_have_nowhere_to_land() {
        let landing = landing(Some(Role::Chef), Some(&chef("Mama Oliech", false)));
        assert_eq!(landing, Landing::AwaitingApproval);
        assert_eq!(landing.path(), None);
    }

    #[test]
    fn foodies_and_roleless_accounts() {
        assert_eq!(landing(Some(Role::Foodie), None).path(), Some("/foodie-home".to_string()));
        assert_eq!(landing(None, None).path(), Some("/profile-setup".to_string()));
    }
}
