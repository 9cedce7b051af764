//! Static-to-dynamic navigation sample transform.
//!
//! Takes one code sample written in the declarative configuration style
//! and derives the equivalent sample in the component-tree style:
//!
//! 1. parse the sample ([`navmd_syntax`]),
//! 2. scan for navigator declarations and a root wrap ([`scan`]),
//! 3. decompose each configuration object ([`decompose`]),
//! 4. synthesize the construction binding and function component
//!    ([`synth`]),
//! 5. print canonically and re-insert tracked comments ([`reinject`]).
//!
//! Unrecognized screens and properties are skipped rather than fatal;
//! only an unparsable sample aborts the transform.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use navmd_syntax::{ParseError, Program, Stmt, parse, print_program, print_stmt};

pub mod comments;
pub mod consts;
pub mod decompose;
pub mod reinject;
pub mod scan;
pub mod synth;

use comments::CommentTracker;
use consts::{ROOT_CONTAINER, STATIC_ROOT_FACTORY};
use decompose::decompose;
use reinject::reinject;
use synth::{NameAllocator, root_container, synthesize};

/// Errors that abort a sample transform.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to parse sample")]
    Parse(#[from] ParseError),
}

/// The derived dynamic-form sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// The printed dynamic form, comments re-injected.
    pub dynamic: String,
    /// Number of navigator declarations that were rewritten.
    pub navigators: usize,
}

/// Derive the dynamic form of a static navigation sample.
///
/// A sample with no recognizable navigator declaration passes through
/// unchanged so that the caller can still show both panels.
pub fn transform(source: &str) -> Result<Transformed, TransformError> {
    let program = parse(source)?;
    let scanned = scan::scan(&program);

    if scanned.navigators.is_empty() {
        debug!("no navigator declarations recognized, sample passes through");
        return Ok(Transformed {
            dynamic: source.to_owned(),
            navigators: 0,
        });
    }

    let mut tracker = CommentTracker::new();
    let mut names = NameAllocator::new();
    let mut generated: HashMap<usize, Vec<Stmt>> = HashMap::new();
    for descriptor in &scanned.navigators {
        let parsed = decompose(&descriptor.config, &mut tracker);
        let synthesized = synthesize(descriptor, &parsed, &mut names);
        generated.insert(descriptor.index, synthesized.stmts);
    }

    let last_component = scanned
        .navigators
        .last()
        .map(|nav| nav.component_name.clone());

    // rebuild forward: splice generated statements in place of each
    // navigator declaration, swap the wrap for the container element
    let mut stmts = Vec::with_capacity(program.stmts.len() + scanned.navigators.len());
    let mut replaced_wrap = false;
    for (index, stmt) in program.stmts.into_iter().enumerate() {
        if let Some(new_stmts) = generated.remove(&index) {
            stmts.extend(new_stmts);
        } else if let Some(wrap) = scanned
            .root_wrap
            .as_ref()
            .filter(|wrap| wrap.index == index)
        {
            if let Some(component) = &last_component {
                stmts.push(root_container(wrap, component));
                replaced_wrap = true;
            }
        } else {
            stmts.push(stmt);
        }
    }

    let stmts = rewrite_imports(stmts, replaced_wrap);
    let printed = print_program(&Program { stmts });
    let dynamic = reinject(&printed, tracker.comments());

    Ok(Transformed {
        dynamic,
        navigators: scanned.navigators.len(),
    })
}

/// Drop named imports the rewritten sample no longer uses and swap the
/// static root factory for the container component where the wrap was
/// replaced. Default imports are kept as written.
fn rewrite_imports(stmts: Vec<Stmt>, replaced_wrap: bool) -> Vec<Stmt> {
    let body: String = stmts
        .iter()
        .filter(|stmt| !matches!(stmt, Stmt::Import(_)))
        .map(print_stmt)
        .collect();

    let mut out = Vec::with_capacity(stmts.len());
    for stmt in stmts {
        let Stmt::Import(mut import) = stmt else {
            out.push(stmt);
            continue;
        };

        let mut seen: HashSet<String> = HashSet::new();
        import.names = import
            .names
            .into_iter()
            .filter_map(|name| {
                if replaced_wrap && name == STATIC_ROOT_FACTORY {
                    is_used(&body, ROOT_CONTAINER).then(|| ROOT_CONTAINER.to_owned())
                } else {
                    is_used(&body, &name).then_some(name)
                }
            })
            .filter(|name| seen.insert(name.clone()))
            .collect();

        if import.names.is_empty() && import.default_name.is_none() {
            debug!(module = %import.module, "import no longer used, dropping");
            continue;
        }
        out.push(Stmt::Import(import));
    }
    out
}

fn is_used(body: &str, name: &str) -> bool {
    Regex::new(&format!(r"\b{}\b", regex::escape(name)))
        .is_ok_and(|re| re.is_match(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_navigator_with_root_wrap() {
        let source = "\
import { createStaticNavigation } from '@react-navigation/native';
import { createNativeStackNavigator } from '@react-navigation/native-stack';

const RootStack = createNativeStackNavigator({
  screens: {
    Home: HomeScreen,
    Profile: ProfileScreen,
  },
});

const Navigation = createStaticNavigation(RootStack);
";
        let out = transform(source).unwrap();
        assert_eq!(out.navigators, 1);
        assert_eq!(
            out.dynamic,
            "\
import { NavigationContainer } from '@react-navigation/native';
import { createNativeStackNavigator } from '@react-navigation/native-stack';

const Stack = createNativeStackNavigator();

function RootStack() {
  return (
    <Stack.Navigator>
      <Stack.Screen name=\"Home\" component={HomeScreen} />
      <Stack.Screen name=\"Profile\" component={ProfileScreen} />
    </Stack.Navigator>
  );
}

<NavigationContainer>
  <RootStack />
</NavigationContainer>
"
        );
    }

    #[test]
    fn test_helper_wrapped_screen_unwraps_and_drops_import() {
        let source = "\
import { createScreenConfig } from '@react-navigation/native';

const RootStack = createStackNavigator({
  screens: {
    Details: createScreenConfig({
      screen: DetailsScreen,
      options: { headerShown: false },
    }),
  },
});
";
        let out = transform(source).unwrap();
        assert!(out.dynamic.contains(
            "<Stack.Screen name=\"Details\" component={DetailsScreen} options={{ headerShown: false }} />"
        ));
        assert!(!out.dynamic.contains("createScreenConfig"));
        assert!(!out.dynamic.contains("import"));
    }

    #[test]
    fn test_groups_nest_in_declaration_order() {
        let source = "\
const RootStack = createStackNavigator({
  groups: {
    Modal: {
      screenOptions: { presentation: 'modal' },
      screens: {
        Help: HelpScreen,
      },
    },
    Main: {
      screens: {
        Home: HomeScreen,
      },
    },
  },
});
";
        let out = transform(source).unwrap();
        let modal_at = out
            .dynamic
            .find("<Stack.Group key=\"Modal\" screenOptions={{ presentation: 'modal' }}>")
            .expect("modal group");
        let main_at = out.dynamic.find("<Stack.Group key=\"Main\">").expect("main group");
        assert!(modal_at < main_at);
        assert!(out.dynamic.contains("name=\"Help\""));
        assert!(out.dynamic.contains("name=\"Home\""));
    }

    #[test]
    fn test_leading_comment_lands_above_screen_element() {
        let source = "\
const RootStack = createStackNavigator({
  screens: {
    Home: HomeScreen,
    // highlight-next-line
    Profile: ProfileScreen,
  },
});
";
        let out = transform(source).unwrap();
        assert!(out.dynamic.contains(
            "      {/* highlight-next-line */}\n      <Stack.Screen name=\"Profile\" component={ProfileScreen} />"
        ));
    }

    #[test]
    fn test_navigator_props_emitted_as_attributes() {
        let source = "\
const RootStack = createStackNavigator({
  initialRouteName: 'Home',
  screenOptions: { headerShown: false },
  screens: {
    Home: HomeScreen,
  },
});
";
        let out = transform(source).unwrap();
        assert!(out.dynamic.contains(
            "<Stack.Navigator initialRouteName=\"Home\" screenOptions={{ headerShown: false }}>"
        ));
    }

    #[test]
    fn test_two_navigators_get_unique_short_names() {
        let source = "\
const HomeTabs = createBottomTabNavigator({
  screens: {
    Feed: FeedScreen,
  },
});

const RootStack = createStackNavigator({
  screens: {
    Tabs: HomeTabs,
  },
});
";
        let out = transform(source).unwrap();
        assert_eq!(out.navigators, 2);
        assert!(out.dynamic.contains("const Tab = createBottomTabNavigator();"));
        assert!(out.dynamic.contains("const Stack = createStackNavigator();"));
        assert!(out.dynamic.contains("function HomeTabs() {"));
        assert!(out.dynamic.contains("function RootStack() {"));
    }

    #[test]
    fn test_kind_collision_gets_letter_suffix() {
        let source = "\
const Inner = createStackNavigator({
  screens: {
    Home: HomeScreen,
  },
});

const Outer = createNativeStackNavigator({
  screens: {
    Inner: Inner,
  },
});
";
        let out = transform(source).unwrap();
        assert!(out.dynamic.contains("const Stack = createStackNavigator();"));
        assert!(out.dynamic.contains("const StackA = createNativeStackNavigator();"));
        assert!(out.dynamic.contains("<StackA.Navigator>"));
    }

    #[test]
    fn test_unrelated_statements_pass_through() {
        let source = "\
function HomeScreen() {
  return <View />;
}

const RootStack = createStackNavigator({
  screens: {
    Home: HomeScreen,
  },
});
";
        let out = transform(source).unwrap();
        assert!(out.dynamic.starts_with("function HomeScreen() {\n  return <View />;\n}\n"));
    }

    #[test]
    fn test_trailing_commas_keep_screens() {
        let source = "\
const title = 'App';

const RootStack = createStackNavigator({
  screens: {
    Home: HomeScreen,
  },
  initialRouteName: 'Home',
});
";
        let out = transform(source).unwrap();
        assert!(out.dynamic.contains("<Stack.Navigator initialRouteName=\"Home\">"));
        assert!(out.dynamic.contains("<Stack.Screen name=\"Home\" component={HomeScreen} />"));
    }

    #[test]
    fn test_comment_outside_navigator_survives() {
        let source = "\
const linkingOptions = configureLinking({
  // highlight-next-line
  enabled: true,
});

const RootStack = createStackNavigator({
  screens: {
    Home: HomeScreen,
  },
});
";
        let out = transform(source).unwrap();
        assert!(out.dynamic.contains("// highlight-next-line\n  enabled: true,"));
    }

    #[test]
    fn test_sample_without_navigator_passes_through() {
        let source = "const title = 'Hello';\n";
        let out = transform(source).unwrap();
        assert_eq!(out.navigators, 0);
        assert_eq!(out.dynamic, source);
    }

    #[test]
    fn test_unparsable_sample_is_fatal() {
        let err = transform("const x = 'unterminated").unwrap_err();
        assert!(matches!(err, TransformError::Parse(_)));
    }

    #[test]
    fn test_wrap_statement_deleted_not_kept() {
        let source = "\
const RootStack = createStackNavigator({
  screens: {
    Home: HomeScreen,
  },
});

const Navigation = createStaticNavigation(RootStack);
";
        let out = transform(source).unwrap();
        assert!(!out.dynamic.contains("createStaticNavigation"));
        assert!(!out.dynamic.contains("const Navigation"));
    }
}
